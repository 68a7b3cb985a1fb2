mod detail;
mod list;

pub(crate) use detail::ConsumerDetailPage;
pub(crate) use list::ConsumersListPage;
