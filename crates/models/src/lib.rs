pub mod errors;
pub mod db;
pub mod quiz;
pub mod question;

#[cfg(test)]
mod tests;
