mod detail;
mod list;

pub(crate) use detail::ResellerDetailPage;
pub(crate) use list::ResellersListPage;
