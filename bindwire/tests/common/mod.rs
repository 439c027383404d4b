use bindwire::Element;
use bindwire::testing::SyntheticElement;
use std::sync::Arc;

/// Coerce a synthetic element to the capability the engine scans.
pub fn as_root(element: &Arc<SyntheticElement>) -> Arc<dyn Element> {
    Arc::clone(element) as Arc<dyn Element>
}
