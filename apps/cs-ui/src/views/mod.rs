pub mod cell_view;
pub mod plot_view;

pub use cell_view::CellView;
pub use plot_view::PlotView;
