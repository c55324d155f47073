//! Integration test driver for `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that exercises the decision loop
//! against mock hardware.  All tests run on the host with no real
//! hardware required.

mod mock_hw;
mod sim_tests;
