// Scorer: raw onboarding profile -> normalised 0-5 skill scores.

pub mod handlers;
pub mod scorer;
