// FishBrowser services
// Stateless or self-contained helpers used by the event router: menu projection and title queries.

pub mod menu_builder;
pub mod title_query;
