//! Database fixtures. These need a running PostgreSQL instance.

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection, Executor};

use pgrest_configuration::Configuration;

const CARS: &str = r#"
    INSERT INTO {table} (id, manufacturer, "type", licenseplate)
    VALUES
        (1, 'BMW', '760i', 'M-VL-2515'),
        (2, 'BMW', '325i', 'M-VL-1515'),
        (3, 'VW', 'Golf', 'H-A-6548'),
        (4, 'VW', 'Passat', 'H-DM-415'),
        (5, 'Audi', 'A4', 'IN-G-489'),
        (6, 'Audi', 'A6', 'IN-MF-45'),
        (7, 'Mercedes', 'S-500', 'S-L-4113'),
        (8, 'Mercedes', 'SEL', 'S-DM-1387'),
        (9, 'Ford', 'Cougar', 'K-Q-485'),
        (10, 'Ford', 'Focus', 'K-OP-8714')
"#;

const CARS_COLUMNS: &str = r#"
    id serial NOT NULL,
    manufacturer varchar(50) NOT NULL,
    "type" varchar(50) NOT NULL,
    licenseplate varchar(25) NULL,
    registered_at timestamp NULL DEFAULT '2019-03-07 09:05:00'
"#;

/// A table in a schema of its own, so that tests can run side by side.
pub struct TestTable {
    pub schema: String,
    pub relation: String,
}

impl TestTable {
    /// The ten-row `cars` table.
    pub async fn cars(configuration: &Configuration) -> anyhow::Result<TestTable> {
        TestTable::create(configuration, "cars", CARS_COLUMNS, CARS).await
    }

    /// Create `relation` with the given column definitions, then run `insert`
    /// with `{table}` replaced by the qualified table name.
    pub async fn create(
        configuration: &Configuration,
        relation: &str,
        columns: &str,
        insert: &str,
    ) -> anyhow::Result<TestTable> {
        let schema = format!("pgrest_test_{}", uuid::Uuid::new_v4().simple());
        let table = format!("\"{schema}\".\"{relation}\"");

        let mut connection = connect(configuration).await?;
        connection
            .execute(format!("CREATE SCHEMA \"{schema}\"").as_str())
            .await?;
        connection
            .execute(format!("CREATE TABLE {table} ({columns})").as_str())
            .await?;
        connection
            .execute(insert.replace("{table}", &table).as_str())
            .await?;
        connection.close().await?;

        Ok(TestTable {
            schema,
            relation: relation.to_string(),
        })
    }

    pub async fn drop(self, configuration: &Configuration) -> anyhow::Result<()> {
        let mut connection = connect(configuration).await?;
        connection
            .execute(format!("DROP SCHEMA IF EXISTS \"{}\" CASCADE", self.schema).as_str())
            .await?;
        connection.close().await?;
        Ok(())
    }
}

async fn connect(configuration: &Configuration) -> anyhow::Result<PgConnection> {
    let parameters = &configuration.connection;
    let connection = PgConnectOptions::new()
        .host(&parameters.host)
        .port(parameters.port)
        .database(&parameters.dbname)
        .username(&parameters.user)
        .password(&parameters.password)
        .connect()
        .await?;
    Ok(connection)
}
