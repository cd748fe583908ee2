//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `hanabatake_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use hanabatake_core::db::open_db_in_memory;
use hanabatake_core::{GardenService, SqliteBlobRepository, ThreadRandomSource};

fn main() {
    println!("hanabatake_core version={}", hanabatake_core::core_version());

    match open_db_in_memory() {
        Ok(conn) => {
            let service = GardenService::open(SqliteBlobRepository::new(&conn), ThreadRandomSource);
            println!(
                "seeded tasks={} uncompleted={} flowers={}",
                service.sorted_view().len(),
                service.uncompleted_count(),
                service.flowers().len()
            );
        }
        Err(err) => eprintln!("db bootstrap failed: {err}"),
    }
}
