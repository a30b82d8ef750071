//! Declarative test builder.
//!
//! Configuration methods are queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, fixtures::TEST_PASSWORD, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,
    include_user_tables: bool,

    resorts: Vec<(String, String)>, // (name, country)
    users: Vec<(String, entity::sea_orm_active_enums::UserRole)>,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    overpass_endpoints: Vec<(serde_json::Value, usize)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            include_user_tables: false,
            resorts: Vec::new(),
            users: Vec::new(),
            mock_builders: Vec::new(),
            overpass_endpoints: Vec::new(),
        }
    }

    /// Add resort, area, member, trail, lift and trail/lift link tables.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add user, saved resort, review and weather tables.
    ///
    /// The resort table is included as well since every one of these rows
    /// references a resort.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// ```no_run
    /// use piste_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), piste_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Resort)
    ///     .with_table(Trail)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a resort fixture during `build()`.
    pub fn with_mock_resort(mut self, name: impl Into<String>, country: impl Into<String>) -> Self {
        self.resorts.push((name.into(), country.into()));
        self
    }

    /// Insert a user fixture with [`TEST_PASSWORD`] during `build()`.
    pub fn with_mock_user(
        mut self,
        email: impl Into<String>,
        role: entity::sea_orm_active_enums::UserRole,
    ) -> Self {
        self.users.push((email.into(), role));
        self
    }

    /// Add a mock Overpass interpreter endpoint returning `body`.
    pub fn with_overpass_endpoint(mut self, body: serde_json::Value, expected_requests: usize) -> Self {
        self.overpass_endpoints.push((body, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// Order of execution:
    /// 1. Creates database tables
    /// 2. Inserts database fixtures
    /// 3. Creates mock HTTP endpoints
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_catalog_tables || self.include_user_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::Resort));
        }

        if self.include_catalog_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::ResortArea),
                schema.create_table_from_entity(entity::prelude::ResortMember),
                schema.create_table_from_entity(entity::prelude::Trail),
                schema.create_table_from_entity(entity::prelude::Lift),
                schema.create_table_from_entity(entity::prelude::TrailLift),
            ]);
        }

        if self.include_user_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AppUser),
                schema.create_table_from_entity(entity::prelude::UserResort),
                schema.create_table_from_entity(entity::prelude::Review),
                schema.create_table_from_entity(entity::prelude::Weather),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (name, country) in self.resorts {
            setup.catalog().insert_mock_resort(&name, &country).await?;
        }

        for (email, role) in self.users {
            setup
                .user()
                .insert_mock_user_with_role(&email, TEST_PASSWORD, role)
                .await?;
        }

        // 3. Create mock endpoints, custom ones first so they match before the shortcuts
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (body, expected) in self.overpass_endpoints {
            mocks.push(setup.overpass().create_interpreter_endpoint(&body, expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
