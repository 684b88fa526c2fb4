//! Session application services.
//!
//! A session owns one board of selections and one drawer. Sessions are
//! never shared; a multi-user host creates one per user.

mod factory;
mod invert_session;
mod report;

pub use factory::SessionFactory;
pub use invert_session::InvertSession;
pub use report::DrawReport;
