/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Declarative seed data loaded from a JSON state file at startup.

use anyhow::{Context, Result};
use password_auth::generate_hash;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;

use super::characters::NewCharacter;
use super::database::Store;
use super::input::{require_text, validate_email};
use super::planets::NewPlanet;
use super::types::*;
use super::users::NewUser;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_file: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateCharacter {
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatePlanet {
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<i64>,
    pub terrain: Option<String>,
}

/// A favorite refers to its user by email and its target by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateFavorite {
    pub user: String,
    pub character: Option<String>,
    pub planet: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateConfiguration {
    #[serde(default)]
    pub users: Vec<StateUser>,
    #[serde(default)]
    pub characters: Vec<StateCharacter>,
    #[serde(default)]
    pub planets: Vec<StatePlanet>,
    #[serde(default)]
    pub favorites: Vec<StateFavorite>,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Validation error in field '{field}': {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub is_valid: bool,
}

fn default_true() -> bool {
    true
}

impl StateConfiguration {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read state file {}", path))?;
        let config: StateConfiguration =
            serde_json::from_str(&content).context("Failed to parse state file")?;
        Ok(config)
    }

    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        let mut emails = HashSet::new();
        for user in &self.users {
            if !emails.insert(user.email.as_str()) {
                errors.push(ValidationError {
                    field: format!("users.{}.email", user.email),
                    message: "Duplicate email found".to_string(),
                });
            }

            if let Err(e) = validate_email(&user.email) {
                errors.push(ValidationError {
                    field: format!("users.{}.email", user.email),
                    message: e,
                });
            }

            if user.first_name.trim().is_empty() || user.last_name.trim().is_empty() {
                errors.push(ValidationError {
                    field: format!("users.{}.name", user.email),
                    message: "First and last name are required".to_string(),
                });
            }
        }

        let mut character_names = HashSet::new();
        for character in &self.characters {
            if character.name.trim().is_empty() {
                errors.push(ValidationError {
                    field: "characters.name".to_string(),
                    message: "Character name is required".to_string(),
                });
            } else if !character_names.insert(character.name.as_str()) {
                errors.push(ValidationError {
                    field: format!("characters.{}.name", character.name),
                    message: "Duplicate character name found".to_string(),
                });
            }
        }

        let mut planet_names = HashSet::new();
        for planet in &self.planets {
            if planet.name.trim().is_empty() {
                errors.push(ValidationError {
                    field: "planets.name".to_string(),
                    message: "Planet name is required".to_string(),
                });
            } else if !planet_names.insert(planet.name.as_str()) {
                errors.push(ValidationError {
                    field: format!("planets.{}.name", planet.name),
                    message: "Duplicate planet name found".to_string(),
                });
            }
        }

        for favorite in &self.favorites {
            if !emails.contains(favorite.user.as_str()) {
                errors.push(ValidationError {
                    field: format!("favorites.{}.user", favorite.user),
                    message: format!("User '{}' does not exist", favorite.user),
                });
            }

            match (&favorite.character, &favorite.planet) {
                (Some(_), Some(_)) | (None, None) => errors.push(ValidationError {
                    field: format!("favorites.{}", favorite.user),
                    message: "Favorite must name exactly one character or planet".to_string(),
                }),
                (Some(character), None) if !character_names.contains(character.as_str()) => {
                    errors.push(ValidationError {
                        field: format!("favorites.{}.character", favorite.user),
                        message: format!("Character '{}' does not exist", character),
                    })
                }
                (None, Some(planet)) if !planet_names.contains(planet.as_str()) => {
                    errors.push(ValidationError {
                        field: format!("favorites.{}.planet", favorite.user),
                        message: format!("Planet '{}' does not exist", planet),
                    })
                }
                _ => {}
            }
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

pub async fn load_and_apply_state(store: &Store, path: &str) -> Result<()> {
    tracing::info!("Loading state configuration from: {}", path);

    let config = StateConfiguration::from_file(path)?;

    let validation = config.validate();
    if !validation.is_valid {
        let error_messages: Vec<String> = validation
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();

        anyhow::bail!(
            "State configuration validation failed:\n{}",
            error_messages.join("\n")
        );
    }

    tracing::info!("State configuration validated successfully");

    apply_state(store, &config).await?;

    tracing::info!("State applied successfully");
    Ok(())
}

pub async fn apply_state(store: &Store, config: &StateConfiguration) -> Result<()> {
    apply_users(store, &config.users).await?;
    apply_characters(store, &config.characters).await?;
    apply_planets(store, &config.planets).await?;

    // Depends on users, characters and planets
    apply_favorites(store, &config.favorites).await?;

    Ok(())
}

async fn apply_users(store: &Store, state_users: &[StateUser]) -> Result<()> {
    for state_user in state_users {
        let password = fs::read_to_string(&state_user.password_file).with_context(|| {
            format!("Failed to read password file {}", state_user.password_file)
        })?;
        let password = require_text("password", Some(password.trim().to_string()))?;

        if let Some(existing) = store.find_user_by_email(&state_user.email).await? {
            let mut user = existing.into_active_model();
            user.first_name = Set(state_user.first_name.clone());
            user.last_name = Set(state_user.last_name.clone());
            user.password = Set(generate_hash(&password));
            user.is_active = Set(state_user.is_active);
            user.update(store.connection()).await?;
            tracing::info!("Updated managed user: {}", state_user.email);
        } else {
            store
                .create_user(NewUser {
                    email: state_user.email.clone(),
                    password,
                    first_name: state_user.first_name.clone(),
                    last_name: state_user.last_name.clone(),
                    is_active: state_user.is_active,
                })
                .await?;
            tracing::info!("Created managed user: {}", state_user.email);
        }
    }

    Ok(())
}

async fn apply_characters(store: &Store, state_characters: &[StateCharacter]) -> Result<()> {
    for state_character in state_characters {
        let existing = ECharacter::find()
            .filter(CCharacter::Name.eq(&state_character.name))
            .one(store.connection())
            .await?;

        if let Some(existing) = existing {
            let mut character = existing.into_active_model();
            character.gender = Set(state_character.gender.clone());
            character.birth_year = Set(state_character.birth_year.clone());
            character.eye_color = Set(state_character.eye_color.clone());
            character.update(store.connection()).await?;
            tracing::info!("Updated managed character: {}", state_character.name);
        } else {
            store
                .create_character(NewCharacter {
                    name: Some(state_character.name.clone()),
                    gender: state_character.gender.clone(),
                    birth_year: state_character.birth_year.clone(),
                    eye_color: state_character.eye_color.clone(),
                })
                .await?;
            tracing::info!("Created managed character: {}", state_character.name);
        }
    }

    Ok(())
}

async fn apply_planets(store: &Store, state_planets: &[StatePlanet]) -> Result<()> {
    for state_planet in state_planets {
        let existing = EPlanet::find()
            .filter(CPlanet::Name.eq(&state_planet.name))
            .one(store.connection())
            .await?;

        if let Some(existing) = existing {
            let mut planet = existing.into_active_model();
            planet.climate = Set(state_planet.climate.clone());
            planet.population = Set(state_planet.population);
            planet.terrain = Set(state_planet.terrain.clone());
            planet.update(store.connection()).await?;
            tracing::info!("Updated managed planet: {}", state_planet.name);
        } else {
            store
                .create_planet(NewPlanet {
                    name: Some(state_planet.name.clone()),
                    climate: state_planet.climate.clone(),
                    population: state_planet.population,
                    terrain: state_planet.terrain.clone(),
                })
                .await?;
            tracing::info!("Created managed planet: {}", state_planet.name);
        }
    }

    Ok(())
}

async fn apply_favorites(store: &Store, state_favorites: &[StateFavorite]) -> Result<()> {
    for favorite in state_favorites {
        let user = store
            .find_user_by_email(&favorite.user)
            .await?
            .with_context(|| format!("User '{}' does not exist", favorite.user))?;

        if let Some(name) = &favorite.character {
            let character = ECharacter::find()
                .filter(CCharacter::Name.eq(name))
                .one(store.connection())
                .await?
                .with_context(|| format!("Character '{}' does not exist", name))?;

            store.add_favorite_character(user.id, character.id).await?;
        }

        if let Some(name) = &favorite.planet {
            let planet = EPlanet::find()
                .filter(CPlanet::Name.eq(name))
                .one(store.connection())
                .await?
                .with_context(|| format!("Planet '{}' does not exist", name))?;

            store.add_favorite_planet(user.id, planet.id).await?;
        }
    }

    Ok(())
}
