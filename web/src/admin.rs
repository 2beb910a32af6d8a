/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Admin pages. One HTML table per store table with create, edit and delete forms
//! that go through the same store operations as the JSON API.

use crate::error::{WebError, WebResult};
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;
use store::characters::{CharacterPatch, NewCharacter};
use store::database::Store;
use store::planets::{NewPlanet, PlanetPatch};
use store::types::ServerState;
use store::users::{NewUser, UserPatch};

pub type FormData = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    Number,
    Checkbox,
}

#[derive(Debug)]
pub struct FormField {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> FormField {
    FormField { name, kind }
}

pub struct AdminTable {
    pub name: &'static str,
    pub title: &'static str,
    pub columns: &'static [&'static str],
    pub fields: &'static [FormField],
}

pub const ADMIN_TABLES: &[AdminTable] = &[
    AdminTable {
        name: "user",
        title: "User",
        columns: &[
            "id",
            "email",
            "first_name",
            "last_name",
            "subscription_date",
            "is_active",
        ],
        fields: &[
            field("email", FieldKind::Text),
            field("password", FieldKind::Password),
            field("first_name", FieldKind::Text),
            field("last_name", FieldKind::Text),
            field("is_active", FieldKind::Checkbox),
        ],
    },
    AdminTable {
        name: "people",
        title: "Character",
        columns: &["id", "name", "gender", "birth_year", "eye_color"],
        fields: &[
            field("name", FieldKind::Text),
            field("gender", FieldKind::Text),
            field("birth_year", FieldKind::Text),
            field("eye_color", FieldKind::Text),
        ],
    },
    AdminTable {
        name: "planet",
        title: "Planet",
        columns: &["id", "name", "climate", "population", "terrain"],
        fields: &[
            field("name", FieldKind::Text),
            field("climate", FieldKind::Text),
            field("population", FieldKind::Number),
            field("terrain", FieldKind::Text),
        ],
    },
    AdminTable {
        name: "favorite_planet",
        title: "Favorite Planet",
        columns: &["id", "user_id", "planet_id"],
        fields: &[
            field("user_id", FieldKind::Number),
            field("planet_id", FieldKind::Number),
        ],
    },
    AdminTable {
        name: "favorite_character",
        title: "Favorite Character",
        columns: &["id", "user_id", "character_id"],
        fields: &[
            field("user_id", FieldKind::Number),
            field("character_id", FieldKind::Number),
        ],
    },
];

fn find_table(name: &str) -> WebResult<&'static AdminTable> {
    ADMIN_TABLES
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| WebError::not_found("Table"))
}

fn table_url(table: &AdminTable) -> String {
    format!("/admin/{}", table.name)
}

pub async fn get_index(state: State<Arc<ServerState>>) -> Html<String> {
    let links: String = ADMIN_TABLES
        .iter()
        .map(|table| {
            format!(
                "<li><a href=\"{}\">{}</a></li>",
                table_url(table),
                escape_html(table.title)
            )
        })
        .collect();

    Html(render_page(
        &state.cli.admin_name,
        "Tables",
        &format!("<ul>{}</ul>", links),
    ))
}

pub async fn get_table(
    state: State<Arc<ServerState>>,
    Path(name): Path<String>,
) -> WebResult<Html<String>> {
    let table = find_table(&name)?;
    let rows = table_rows(&state.store, table.name).await?;

    Ok(Html(render_page(
        &state.cli.admin_name,
        table.title,
        &render_table(table, &rows),
    )))
}

pub async fn get_new(
    state: State<Arc<ServerState>>,
    Path(name): Path<String>,
) -> WebResult<Html<String>> {
    let table = find_table(&name)?;
    let action = format!("{}/new", table_url(table));

    Ok(Html(render_page(
        &state.cli.admin_name,
        &format!("New {}", table.title),
        &render_form(table, &action, &[]),
    )))
}

pub async fn post_new(
    state: State<Arc<ServerState>>,
    Path(name): Path<String>,
    form: Result<Form<FormData>, FormRejection>,
) -> WebResult<Redirect> {
    let table = find_table(&name)?;
    let Form(form) = form?;

    create_row(&state.store, table.name, &form).await?;
    tracing::info!("Admin created {} row", table.name);

    Ok(Redirect::to(&table_url(table)))
}

pub async fn get_edit(
    state: State<Arc<ServerState>>,
    Path((name, id)): Path<(String, i32)>,
) -> WebResult<Html<String>> {
    let table = find_table(&name)?;
    let values = row_values(&state.store, table.name, id).await?;
    let action = format!("{}/{}/edit", table_url(table), id);

    Ok(Html(render_page(
        &state.cli.admin_name,
        &format!("Edit {} {}", table.title, id),
        &render_form(table, &action, &values),
    )))
}

pub async fn post_edit(
    state: State<Arc<ServerState>>,
    Path((name, id)): Path<(String, i32)>,
    form: Result<Form<FormData>, FormRejection>,
) -> WebResult<Redirect> {
    let table = find_table(&name)?;
    let Form(form) = form?;

    update_row(&state.store, table.name, id, &form).await?;
    tracing::info!(id, "Admin updated {} row", table.name);

    Ok(Redirect::to(&table_url(table)))
}

pub async fn post_delete(
    state: State<Arc<ServerState>>,
    Path((name, id)): Path<(String, i32)>,
) -> WebResult<Redirect> {
    let table = find_table(&name)?;

    match table.name {
        "user" => state.store.delete_user(id).await?,
        "people" => state.store.delete_character(id).await?,
        "planet" => state.store.delete_planet(id).await?,
        "favorite_planet" => state.store.delete_favorite_planet(id).await?,
        "favorite_character" => state.store.delete_favorite_character(id).await?,
        _ => return Err(WebError::not_found("Table")),
    }
    tracing::info!(id, "Admin deleted {} row", table.name);

    Ok(Redirect::to(&table_url(table)))
}

async fn create_row(store: &Store, name: &str, form: &FormData) -> WebResult<()> {
    match name {
        "user" => {
            store
                .create_user(NewUser {
                    email: text(form, "email").unwrap_or_default(),
                    password: text(form, "password").unwrap_or_default(),
                    first_name: text(form, "first_name").unwrap_or_default(),
                    last_name: text(form, "last_name").unwrap_or_default(),
                    is_active: checkbox(form, "is_active"),
                })
                .await?;
        }
        "people" => {
            store
                .create_character(NewCharacter {
                    name: text(form, "name"),
                    gender: text(form, "gender"),
                    birth_year: text(form, "birth_year"),
                    eye_color: text(form, "eye_color"),
                })
                .await?;
        }
        "planet" => {
            store
                .create_planet(NewPlanet {
                    name: text(form, "name"),
                    climate: text(form, "climate"),
                    population: number(form, "population")?,
                    terrain: text(form, "terrain"),
                })
                .await?;
        }
        "favorite_planet" => {
            store
                .add_favorite_planet(required_id(form, "user_id")?, required_id(form, "planet_id")?)
                .await?;
        }
        "favorite_character" => {
            store
                .add_favorite_character(
                    required_id(form, "user_id")?,
                    required_id(form, "character_id")?,
                )
                .await?;
        }
        _ => return Err(WebError::not_found("Table")),
    }

    Ok(())
}

/// Every field of the form is submitted, so a blank input clears a nullable column.
async fn update_row(store: &Store, name: &str, id: i32, form: &FormData) -> WebResult<()> {
    match name {
        "user" => {
            store
                .update_user(
                    id,
                    UserPatch {
                        email: Some(text(form, "email").unwrap_or_default()),
                        password: text(form, "password"),
                        first_name: Some(text(form, "first_name").unwrap_or_default()),
                        last_name: Some(text(form, "last_name").unwrap_or_default()),
                        is_active: Some(checkbox(form, "is_active")),
                    },
                )
                .await?;
        }
        "people" => {
            store
                .update_character(
                    id,
                    CharacterPatch {
                        name: Some(text(form, "name")),
                        gender: Some(text(form, "gender")),
                        birth_year: Some(text(form, "birth_year")),
                        eye_color: Some(text(form, "eye_color")),
                    },
                )
                .await?;
        }
        "planet" => {
            store
                .update_planet(
                    id,
                    PlanetPatch {
                        name: Some(text(form, "name")),
                        climate: Some(text(form, "climate")),
                        population: Some(number(form, "population")?),
                        terrain: Some(text(form, "terrain")),
                    },
                )
                .await?;
        }
        "favorite_planet" => {
            store
                .update_favorite_planet(
                    id,
                    required_id(form, "user_id")?,
                    required_id(form, "planet_id")?,
                )
                .await?;
        }
        "favorite_character" => {
            store
                .update_favorite_character(
                    id,
                    required_id(form, "user_id")?,
                    required_id(form, "character_id")?,
                )
                .await?;
        }
        _ => return Err(WebError::not_found("Table")),
    }

    Ok(())
}

/// Current values of one row, in the order of the table's form fields.
async fn row_values(store: &Store, name: &str, id: i32) -> WebResult<Vec<String>> {
    let values = match name {
        "user" => {
            let u = store.get_user(id).await?;
            vec![
                u.email,
                String::new(),
                u.first_name,
                u.last_name,
                u.is_active.to_string(),
            ]
        }
        "people" => {
            let c = store.get_character(id).await?;
            vec![c.name, cell(&c.gender), cell(&c.birth_year), cell(&c.eye_color)]
        }
        "planet" => {
            let p = store.get_planet(id).await?;
            vec![p.name, cell(&p.climate), cell(&p.population), cell(&p.terrain)]
        }
        "favorite_planet" => {
            let f = store.get_favorite_planet(id).await?;
            vec![f.user_id.to_string(), f.planet_id.to_string()]
        }
        "favorite_character" => {
            let f = store.get_favorite_character(id).await?;
            vec![f.user_id.to_string(), f.character_id.to_string()]
        }
        _ => return Err(WebError::not_found("Table")),
    };

    Ok(values)
}

async fn table_rows(store: &Store, name: &str) -> WebResult<Vec<Vec<String>>> {
    let rows = match name {
        "user" => store
            .list_users()
            .await?
            .into_iter()
            .map(|u| {
                vec![
                    u.id.to_string(),
                    u.email,
                    u.first_name,
                    u.last_name,
                    u.subscription_date.to_string(),
                    u.is_active.to_string(),
                ]
            })
            .collect(),
        "people" => store
            .list_characters()
            .await?
            .into_iter()
            .map(|c| {
                vec![
                    c.id.to_string(),
                    c.name,
                    cell(&c.gender),
                    cell(&c.birth_year),
                    cell(&c.eye_color),
                ]
            })
            .collect(),
        "planet" => store
            .list_planets()
            .await?
            .into_iter()
            .map(|p| {
                vec![
                    p.id.to_string(),
                    p.name,
                    cell(&p.climate),
                    cell(&p.population),
                    cell(&p.terrain),
                ]
            })
            .collect(),
        "favorite_planet" => store
            .list_favorite_planets()
            .await?
            .into_iter()
            .map(|f| {
                vec![
                    f.id.to_string(),
                    f.user_id.to_string(),
                    f.planet_id.to_string(),
                ]
            })
            .collect(),
        "favorite_character" => store
            .list_favorite_characters()
            .await?
            .into_iter()
            .map(|f| {
                vec![
                    f.id.to_string(),
                    f.user_id.to_string(),
                    f.character_id.to_string(),
                ]
            })
            .collect(),
        _ => return Err(WebError::not_found("Table")),
    };

    Ok(rows)
}

fn cell<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn text(form: &FormData, name: &str) -> Option<String> {
    form.get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn checkbox(form: &FormData, name: &str) -> bool {
    form.contains_key(name)
}

fn number<T: FromStr>(form: &FormData, name: &str) -> WebResult<Option<T>> {
    text(form, name)
        .map(|v| {
            v.parse()
                .map_err(|_| WebError::Validation(format!("Invalid number for field: {}", name)))
        })
        .transpose()
}

fn required_id(form: &FormData, name: &str) -> WebResult<i32> {
    number(form, name)?
        .ok_or_else(|| WebError::Validation(format!("Missing required field: {}", name)))
}

fn render_table(table: &AdminTable, rows: &[Vec<String>]) -> String {
    let base = table_url(table);

    let header: String = table
        .columns
        .iter()
        .map(|c| format!("<th>{}</th>", escape_html(c)))
        .collect();

    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|v| format!("<td>{}</td>", escape_html(v)))
                .collect();
            let id = escape_html(row.first().map(String::as_str).unwrap_or_default());
            format!(
                "<tr>{cells}<td><a href=\"{base}/{id}/edit\">Edit</a> \
                 <form method=\"post\" action=\"{base}/{id}/delete\">\
                 <button type=\"submit\">Delete</button></form></td></tr>"
            )
        })
        .collect();

    format!(
        "<p><a href=\"{base}/new\">Create</a></p>\
         <table><thead><tr>{header}<th></th></tr></thead><tbody>{body}</tbody></table>\
         <p>{count} rows</p>",
        count = rows.len()
    )
}

fn render_form(table: &AdminTable, action: &str, values: &[String]) -> String {
    let inputs: String = table
        .fields
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let value = values.get(i).map(String::as_str).unwrap_or_default();
            let name = escape_html(f.name);
            let input = match f.kind {
                FieldKind::Text => format!(
                    "<input type=\"text\" name=\"{}\" value=\"{}\">",
                    name,
                    escape_html(value)
                ),
                FieldKind::Number => format!(
                    "<input type=\"number\" name=\"{}\" value=\"{}\">",
                    name,
                    escape_html(value)
                ),
                // Never echo the stored hash
                FieldKind::Password => format!("<input type=\"password\" name=\"{}\">", name),
                FieldKind::Checkbox => format!(
                    "<input type=\"checkbox\" name=\"{}\" value=\"true\"{}>",
                    name,
                    if value.is_empty() || value == "true" { " checked" } else { "" }
                ),
            };
            format!("<p><label>{} {}</label></p>", name, input)
        })
        .collect();

    format!(
        "<form method=\"post\" action=\"{}\">{}<button type=\"submit\">Save</button></form>",
        escape_html(action),
        inputs
    )
}

fn render_page(admin_name: &str, heading: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{admin} - {heading}</title></head>\
         <body><nav><a href=\"/admin/\">{admin}</a></nav><h1>{heading}</h1>{content}</body></html>",
        admin = escape_html(admin_name),
        heading = escape_html(heading),
        content = content,
    )
}
