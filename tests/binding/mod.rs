//! Name binding tests
//!
//! Hosts that hand over written base-type names rely on the binder to
//! attach symbol identities before generation.
