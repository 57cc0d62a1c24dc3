pub mod lineup_json;

pub use lineup_json::{
    accept_proposal_json, diff_quarters_json, validate_lineup_json, AcceptRequest, DiffRequest,
    DiffResponse, ValidateRequest, ValidateResponse, SCHEMA_VERSION,
};
