/*!
 * # Block drivers
 *
 * A note is a sequence of typed blocks. The orchestration layer that loads
 * and stores blocks never understands any block kind; it resolves a
 * [`BlockDriver`] for the block's type through a [`DriverRegistry`] and
 * invokes one of three generic capabilities:
 *
 * - [`BlockDriver::apply_op`]: a named, type-specific mutation returning
 *   the full replacement payload
 * - [`BlockDriver::get_as_first`]: a plain-text preview of the block
 * - [`BlockDriver::change_type`]: payload conversion to another kind
 *
 * Drivers return a complete new payload; they never mutate stored state in
 * place, so the caller persists whatever comes back, wholesale.
 *
 * The registry is built during startup (see
 * [`DriverRegistry::with_builtin_drivers`]) and read-only afterwards. It is
 * an injected dependency, not a global: tests construct their own.
 */

mod block;
mod driver;
pub mod kinds;
mod registry;

pub use block::Block;
pub use driver::{BlockDriver, BlockError, OpParams};
pub use registry::DriverRegistry;
