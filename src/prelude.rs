// std imports
pub use std::fmt::Display;
pub use std::time::Duration;
pub use std::f32::consts::PI;
pub use std::path::{ Path, PathBuf };
pub use std::ops::Range;
pub use std::collections::{ HashMap, HashSet, BTreeSet };

// sync imports
pub use std::sync::Arc;
pub use parking_lot::{ Mutex, RwLock };

// tokio imports
pub use tokio::sync::mpsc::{ UnboundedSender as AsyncUnboundedSender, UnboundedReceiver as AsyncUnboundedReceiver, unbounded_channel as async_unbounded_channel };

// serde imports
pub use serde::{ Serialize, Deserialize };

// general game imports
pub use crate::engine::*;
pub use crate::tataku::*;
pub use crate::tataku::gameplay::modes::*;

// file imports
pub use crate::SETTINGS_FILE;
pub use crate::REPLAYS_DIR;
