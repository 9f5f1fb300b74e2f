pub mod abundances;
pub mod util;
