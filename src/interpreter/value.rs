/// Runtime values.
///
/// Defines the `Value` enum produced by evaluation, its string
/// representation and the cross-type equality used by `==` and array keys.
pub mod core;
/// Shared ordered-pair arrays.
///
/// Arrays are ordered lists of key/value pairs shared by reference, so that
/// assigning an array to another variable aliases it.
pub mod array;
