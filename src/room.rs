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

//! Listening room membership.
//!
//! Rooms gate the voting feature: songs can only be proposed and voted on
//! while a room is active. There is no room protocol behind this module;
//! ids, member counts and peers are all mocked locally.

use rand::{RngExt, rng};

const ROOM_ID_LEN: usize = 6;
const ROOM_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const DEFAULT_MAX_MEMBERS: u32 = 5;

/// Host-side options for creating a room.
#[derive(Debug, Clone)]
pub struct RoomOptions {
    pub name: String,
    pub description: String,
    pub max_members: u32,
    pub is_private: bool,
}

impl Default for RoomOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            max_members: DEFAULT_MAX_MEMBERS,
            is_private: false,
        }
    }
}

impl RoomOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// The room the user is currently in.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub description: String,
    pub max_members: u32,
    pub is_private: bool,
    pub members: u32,
    pub is_host: bool,
}

impl Room {
    /// Creates a room hosted by the local user, with a freshly generated
    /// id and the user as its only member.
    pub(crate) fn host(options: RoomOptions) -> Self {
        Self {
            id: generate_room_id(),
            name: options.name,
            description: options.description,
            max_members: options.max_members,
            is_private: options.is_private,
            members: 1,
            is_host: true,
        }
    }

    /// Joins an existing room by id. The membership count is mocked; no
    /// lookup happens.
    pub(crate) fn join(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Room {}", id),
            description: String::new(),
            max_members: DEFAULT_MAX_MEMBERS,
            is_private: false,
            members: rng().random_range(2..=11),
            is_host: false,
        }
    }
}

/// Generates a 6-character uppercase alphanumeric room id.
fn generate_room_id() -> String {
    let mut rng = rng();
    (0..ROOM_ID_LEN)
        .map(|_| ROOM_ID_CHARSET[rng.random_range(0..ROOM_ID_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_six_uppercase_alphanumerics() {
        for _ in 0..50 {
            let id = generate_room_id();
            assert_eq!(id.len(), ROOM_ID_LEN);
            assert!(id.bytes().all(|b| ROOM_ID_CHARSET.contains(&b)));
        }
    }

    #[test]
    fn hosting_makes_a_single_member_room() {
        let room = Room::host(RoomOptions::named("Friday Jams"));

        assert_eq!(room.name, "Friday Jams");
        assert_eq!(room.members, 1);
        assert!(room.is_host);
        assert_eq!(room.max_members, DEFAULT_MAX_MEMBERS);
        assert!(!room.is_private);
    }

    #[test]
    fn joining_mocks_a_plausible_member_count() {
        for _ in 0..50 {
            let room = Room::join("AB12CD");

            assert_eq!(room.id, "AB12CD");
            assert_eq!(room.name, "Room AB12CD");
            assert!(!room.is_host);
            assert!((2..=11).contains(&room.members));
        }
    }
}
