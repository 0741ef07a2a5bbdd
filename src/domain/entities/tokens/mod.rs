pub mod revoked_token;
