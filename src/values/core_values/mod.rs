pub mod closure;
pub mod complex;
pub mod double;
pub mod environment;
pub mod external;
pub mod integer;
pub mod logical;
pub mod pairlist;
pub mod s4;
pub mod symbol;
pub mod vector;
