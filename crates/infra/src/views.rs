//! Cached dashboard views and their invalidation.

/// The dashboard views whose cached renderings mutations invalidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewPath {
    InvoiceListing,
    CustomerListing,
}

impl ViewPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewPath::InvoiceListing => "/dashboard/invoices",
            ViewPath::CustomerListing => "/dashboard/customers",
        }
    }
}

impl core::fmt::Display for ViewPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that holds rendered views and can drop them.
///
/// Mutations call [`invalidate`](ViewCache::invalidate) after touching the
/// store so the next read re-renders from fresh rows. Invalidation is
/// always fire-and-forget; no mutation outcome depends on it.
pub trait ViewCache: Send + Sync {
    fn invalidate(&self, view: ViewPath);
}
