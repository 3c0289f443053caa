pub mod assertions;
pub mod builders;
