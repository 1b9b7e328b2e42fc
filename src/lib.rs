pub mod traits;
pub mod model;
pub mod options;
pub mod coord;
pub mod layout;
pub mod bucket;
pub mod scroll;
pub mod panels;
pub mod view;
pub mod schedule;
pub mod demo;

// Export trait seams
pub use traits::{LayoutSurface, Panel, PanelFrame, ScrollbarGutter};

// Export the data model
pub use model::{CalendarEvent, DateSpan, EventId, EventSegment, PanelKind};

// Export configuration
pub use options::AgendaOptions;

// Export the coordinate map
pub use coord::{CompositeCoordMap, CoordinateRegion, RegionHit};

// Export layout negotiation
pub use layout::{LayoutState, ScrollCompensator, VerticalLayoutEngine};

// Export bucketing and scroll control
pub use bucket::EventBucketer;
pub use scroll::{DeferredTask, ScrollPositionController, ScrollState};

// Export the panels and the view
pub use panels::{AllDayPanel, TimePanel};
pub use view::{AgendaView, ViewFrame};

// Export schedule I/O and demo generation
pub use schedule::{read_schedule, save_schedule, Schedule, SCHEDULE_VERSION};
pub use demo::demo_schedule;
