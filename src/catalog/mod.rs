//! Remote catalog fetch and tracked-object registry population.
//!
//! One pass per session: list the catalog for the configured date, then
//! fetch each object's elements as its own IO-pool task. Completed tasks
//! are merged on the main schedule after full validation, so frames render
//! with a progressively growing registry while fetches are outstanding.
//! Failures skip the object and count toward [`FetchStatus`]; nothing here
//! is fatal.

pub mod client;

use bevy::prelude::*;
use bevy::tasks::futures_lite::future;
use bevy::tasks::{IoTaskPool, Task};

use crate::elements::RawElementsRecord;
use crate::kepler::{self, DEFAULT_ORBIT_SEGMENTS};
use crate::render::markers;
use crate::types::{MU_AU_DAY, ObjectRegistry, TrackedObject};

use self::client::{CatalogEntry, FetchError};

const DEFAULT_BASE_URL: &str = "https://backnear-production.up.railway.app";
const DEFAULT_DATE: &str = "2024-08-05";

/// Where and what to fetch. Built once in `main`; environment variables
/// override the defaults (`NEOVIEW_API_URL`, `NEOVIEW_DATE`).
#[derive(Resource, Clone, Debug)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Catalog date, `YYYY-MM-DD`.
    pub date: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            date: DEFAULT_DATE.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("NEOVIEW_API_URL").unwrap_or(defaults.base_url),
            date: std::env::var("NEOVIEW_DATE").unwrap_or(defaults.date),
        }
    }
}

/// Progress of the one-pass catalog fetch, surfaced in the UI panel.
#[derive(Resource, Default, Debug)]
pub struct FetchStatus {
    /// Objects listed by the catalog endpoint.
    pub discovered: usize,
    /// Objects validated and added to the registry.
    pub loaded: usize,
    /// Objects dropped by fetch or validation failure.
    pub skipped: usize,
    /// Whether the catalog listing itself has resolved.
    pub catalog_done: bool,
    /// Most recent failure, for the status line.
    pub last_error: Option<String>,
}

impl FetchStatus {
    /// Objects still in flight.
    pub fn pending(&self) -> usize {
        self.discovered.saturating_sub(self.loaded + self.skipped)
    }
}

#[derive(Component)]
struct CatalogTask(Task<Result<Vec<CatalogEntry>, FetchError>>);

#[derive(Component)]
struct ElementsTask {
    id: String,
    name: String,
    task: Task<Result<RawElementsRecord, FetchError>>,
}

/// Plugin driving the fetch pipeline.
pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FetchStatus>()
            .add_systems(Startup, begin_catalog_fetch)
            .add_systems(Update, (poll_catalog_task, poll_elements_tasks));
    }
}

/// Kick off the catalog listing on the IO pool.
fn begin_catalog_fetch(mut commands: Commands, config: Res<CatalogConfig>) {
    let config = config.clone();
    info!("Fetching object catalog for {}", config.date);

    let task = IoTaskPool::get().spawn(async move {
        let client = reqwest::blocking::Client::new();
        client::fetch_catalog(&client, &config.base_url, &config.date)
    });
    commands.spawn(CatalogTask(task));
}

/// When the listing resolves, spawn one elements fetch per object.
///
/// A failed listing is treated as an empty catalog: logged, counted, and
/// the scene keeps rendering.
fn poll_catalog_task(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut CatalogTask)>,
    config: Res<CatalogConfig>,
    mut status: ResMut<FetchStatus>,
) {
    for (task_entity, mut pending) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut pending.0)) else {
            continue;
        };
        commands.entity(task_entity).despawn();
        status.catalog_done = true;

        let entries = match result {
            Ok(entries) => entries,
            Err(err) => {
                warn!("Catalog fetch failed: {err}");
                status.last_error = Some(format!("catalog: {err}"));
                continue;
            }
        };

        status.discovered = entries.len();
        info!("Catalog listed {} objects", entries.len());

        let pool = IoTaskPool::get();
        for entry in entries {
            let id = entry.id_string();
            let name = entry.display_name();
            let base_url = config.base_url.clone();
            let task_id = id.clone();
            let task = pool.spawn(async move {
                let client = reqwest::blocking::Client::new();
                client::fetch_elements(&client, &base_url, &task_id)
            });
            commands.spawn(ElementsTask { id, name, task });
        }
    }
}

/// Merge completed elements fetches into the registry.
///
/// Each record is validated wholesale, propagated to its snapshot position,
/// and spawned as a marker; any failure drops the record entirely. The
/// registry append order follows task completion order, which is the
/// session's stable picking order from then on.
fn poll_elements_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut ElementsTask)>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<ObjectRegistry>,
    mut status: ResMut<FetchStatus>,
) {
    for (task_entity, mut pending) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut pending.task)) else {
            continue;
        };
        let id = pending.id.clone();
        let name = pending.name.clone();
        commands.entity(task_entity).despawn();

        let record = match result {
            Ok(record) => record,
            Err(err) => {
                warn!("Skipping object {id}: {err}");
                status.skipped += 1;
                status.last_error = Some(format!("{id}: {err}"));
                continue;
            }
        };

        // Malformed records are rejected wholesale, never partially rendered.
        let elements = match record.validate() {
            Ok(elements) => elements,
            Err(err) => {
                warn!("Skipping object {id}: {err}");
                status.skipped += 1;
                status.last_error = Some(format!("{id}: {err}"));
                continue;
            }
        };

        // Validated elements cannot fail here; skip rather than panic if
        // they somehow do.
        let (propagation, path) = match kepler::propagate(&elements, MU_AU_DAY).and_then(
            |propagation| {
                kepler::sample_orbit_path(&elements, MU_AU_DAY, DEFAULT_ORBIT_SEGMENTS)
                    .map(|path| (propagation, path))
            },
        ) {
            Ok(ok) => ok,
            Err(err) => {
                warn!("Skipping object {id}: {err}");
                status.skipped += 1;
                status.last_error = Some(format!("{id}: {err}"));
                continue;
            }
        };

        if !propagation.converged {
            warn!("Kepler solve did not converge for object {id}; using best-effort position");
        }

        let entity = markers::spawn_tracked_object(
            &mut commands,
            &mut meshes,
            &mut materials,
            TrackedObject {
                id,
                name,
                elements,
                converged: propagation.converged,
            },
            propagation.position,
            path,
        );
        registry.push(entity);
        status.loaded += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_status_pending() {
        let status = FetchStatus {
            discovered: 10,
            loaded: 4,
            skipped: 2,
            catalog_done: true,
            last_error: None,
        };
        assert_eq!(status.pending(), 4);
    }

    #[test]
    fn test_fetch_status_pending_never_underflows() {
        // A failed listing leaves discovered at zero while nothing loaded.
        let status = FetchStatus::default();
        assert_eq!(status.pending(), 0);
    }

    #[test]
    fn test_config_defaults() {
        let config = CatalogConfig::default();
        assert!(config.base_url.starts_with("https://"));
        assert_eq!(config.date, DEFAULT_DATE);
    }
}
