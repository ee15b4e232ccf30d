pub(crate) mod header;
pub(crate) mod layout;
pub(crate) mod protected;
pub(crate) mod resource_detail;
pub(crate) mod resource_list;
