// Both only ever exchange adjacent elements that are strictly out of order, so equal elements
// keep their relative order.
pub mod bubble;
pub mod insertion;
