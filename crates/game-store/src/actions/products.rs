//! Product listing actions

#[derive(Debug, Clone)]
pub enum ProductsAction {
    CycleSort,
    CycleGenre,
    CyclePlatform,
    SelectNext,
    SelectPrevious,
}
