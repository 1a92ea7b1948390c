/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod candidate;
pub mod errors;
pub mod match_result;
pub mod resolver;
pub mod scope;
pub mod scoper;
pub mod utils;
