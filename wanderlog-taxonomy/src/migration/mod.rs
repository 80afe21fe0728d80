mod legacy_migration;

pub use legacy_migration::{LegacyMigration, MigrationMapping, MigrationResult};
