//! HTTP surface
//!
//! Routes are nested under `/api/`:
//!
//! | Method | Path                 | Handler |
//! |--------|----------------------|---------|
//! | POST   | `/api/reconstruct`   | refine text |
//! | POST   | `/api/restore`       | fetch a past result |
//! | GET    | `/api/stats`         | the signed-in user's dashboard numbers |
//! | GET    | `/api/words-refined` | words refined by this process so far |
//! | GET    | `/api/health`        | liveness and model status |

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use router::{api_router, cors_layer};
pub use server::serve;
pub use state::AppState;
