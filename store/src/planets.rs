/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder};
use serde::{Deserialize, Serialize};

use super::database::Store;
use super::error::{StoreError, StoreResult};
use super::input::{deserialize_some, require_text};
use super::types::*;

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct NewPlanet {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub population: Option<i64>,
    pub terrain: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct PlanetPatch {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub climate: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub population: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub terrain: Option<Option<String>>,
}

impl Store {
    pub async fn list_planets(&self) -> StoreResult<Vec<MPlanet>> {
        let planets = EPlanet::find()
            .order_by_asc(CPlanet::Id)
            .all(self.connection())
            .await?;

        Ok(planets)
    }

    pub async fn get_planet(&self, id: i32) -> StoreResult<MPlanet> {
        EPlanet::find_by_id(id)
            .one(self.connection())
            .await?
            .ok_or_else(|| StoreError::not_found("Planet"))
    }

    pub async fn create_planet(&self, new: NewPlanet) -> StoreResult<MPlanet> {
        let name = require_text("name", new.name)?;

        let planet = APlanet {
            name: Set(name),
            climate: Set(new.climate),
            population: Set(new.population),
            terrain: Set(new.terrain),
            ..Default::default()
        };

        let planet = planet.insert(self.connection()).await?;
        tracing::debug!(id = planet.id, "Created planet");

        Ok(planet)
    }

    pub async fn update_planet(&self, id: i32, patch: PlanetPatch) -> StoreResult<MPlanet> {
        let planet = self.get_planet(id).await?;
        let mut aplanet = planet.clone().into_active_model();

        if let Some(name) = patch.name {
            aplanet.name = Set(require_text("name", name)?);
        }

        if let Some(climate) = patch.climate {
            aplanet.climate = Set(climate);
        }

        if let Some(population) = patch.population {
            aplanet.population = Set(population);
        }

        if let Some(terrain) = patch.terrain {
            aplanet.terrain = Set(terrain);
        }

        if !aplanet.is_changed() {
            return Ok(planet);
        }

        Ok(aplanet.update(self.connection()).await?)
    }

    pub async fn delete_planet(&self, id: i32) -> StoreResult<()> {
        let result = EPlanet::delete_by_id(id).exec(self.connection()).await?;

        if result.rows_affected == 0 {
            return Err(StoreError::not_found("Planet"));
        }

        tracing::debug!(id, "Deleted planet");
        Ok(())
    }
}
