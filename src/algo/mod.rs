/*!
# Matching Algorithms

This module provides the **Hopcroft–Karp** algorithm for maximum cardinality matchings in
bipartite graphs, split into its building blocks:

- [`layer`]: the alternating BFS computing [`Layers`] for a given matching,
- [`find_augmenting_path`] / [`AugmentingSearch`]: the layered DFS extracting augmenting paths,
- [`HopcroftKarp`] / [`run`] / [`MaximumMatching`]: the driver alternating both phases.

All items are re-exported at the top level of this module, so you can simply do:
```rust
use bimatch::{prelude::*, algo::*};
```
*/

mod augmenting;
mod hopcroft_karp;
mod layering;

use crate::prelude::*;

pub use augmenting::*;
pub use hopcroft_karp::*;
pub use layering::*;
