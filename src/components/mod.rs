// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Interactive UI components.
//!
//! Each component owns its own input state and turns key presses into
//! [`Action`](crate::actions::Action)s for the dispatcher, it never touches
//! the library directly.

pub(crate) mod dialog;
pub(crate) mod filter;
pub(crate) mod genre_select;
pub(crate) mod time_picker;

pub(crate) use self::{filter::FilterPanel, genre_select::GenreSelect, time_picker::TimePicker};
