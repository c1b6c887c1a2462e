//! Shared route tables for integration and property tests.

use jobboard_router::routing::{Resolver, RouteTable, ViewId};

/// The job board table with a trailing catch-all.
pub fn job_board_entries() -> Vec<(&'static str, ViewId)> {
    vec![
        ("/", ViewId::Home),
        ("/jobs", ViewId::Jobs),
        ("/add-job", ViewId::AddJob),
        ("/job/:id", ViewId::JobPreview),
        ("/edit-job/:id", ViewId::EditJob),
        ("/*", ViewId::NotFound),
    ]
}

/// Resolver over the job board table.
pub fn job_board() -> Resolver {
    Resolver::new(RouteTable::new(job_board_entries()).unwrap())
}

/// Same table without the catch-all, as in the first version of the app.
#[allow(dead_code)]
pub fn job_board_without_fallback() -> Resolver {
    let mut entries = job_board_entries();
    entries.pop();
    Resolver::new(RouteTable::new(entries).unwrap())
}
