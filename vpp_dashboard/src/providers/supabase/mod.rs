//! Customer table hosted behind a Supabase (PostgREST) endpoint.

pub mod provider;
pub mod response;

pub use provider::SupabaseBackend;
