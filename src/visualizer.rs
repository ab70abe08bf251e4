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

//! Mock spectrum data for the player visualizer.
//!
//! There is no signal analysis behind the visualizer; each frame is a
//! fresh set of random band amplitudes. Drawing the bars is the
//! frontend's job, this module only produces the data.

use rand::{RngExt, rng};

/// Number of frequency bands per frame.
pub const SPECTRUM_BANDS: usize = 64;

/// A source of fake frequency spectrum frames.
#[derive(Debug)]
pub struct Spectrum {
    bands: [u8; SPECTRUM_BANDS],
}

impl Default for Spectrum {
    fn default() -> Self {
        Self::new()
    }
}

impl Spectrum {
    pub fn new() -> Self {
        Self {
            bands: [0; SPECTRUM_BANDS],
        }
    }

    /// Regenerates and returns the band amplitudes for the next frame.
    pub fn next_frame(&mut self) -> &[u8] {
        let mut rng = rng();
        for band in self.bands.iter_mut() {
            *band = rng.random();
        }
        &self.bands
    }

    /// The most recently generated frame.
    pub fn bands(&self) -> &[u8] {
        &self.bands
    }
}
