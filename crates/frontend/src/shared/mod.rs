pub mod date_utils;
pub mod export;
pub mod icons;
