mod scroll;
mod workspace;

pub use scroll::ScrollRestoreService;
pub use workspace::WorkspaceService;
