//! Browser binding: the `web_sys` realization of the DOM seam and the
//! outbound command bridge to the hosting page.

pub mod bridge;
pub mod host;

pub use host::WebHost;
