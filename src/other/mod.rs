// Not meant for practical use, unbounded worst case.
pub mod bogo;
