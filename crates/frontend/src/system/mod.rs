pub mod org_context;
