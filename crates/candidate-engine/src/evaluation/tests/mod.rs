mod adjustments;
mod common;
mod routing;
mod weights;
