mod all;
mod button;
mod footer;
mod header;
mod log;
mod result;
mod wheel;

use self::log::log;
use super::*;
use button::button;
use footer::footer;
use header::header;
use result::result;
use wheel::wheel;

pub use all::all as render;
