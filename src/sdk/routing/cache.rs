use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, fs, io::Result as IoResult, path::Path, str::FromStr};

use super::state::LngLat;

/// Cache key for a clicked coordinate, scaled to five decimal places
/// (about a meter), so repeated clicks on the same spot hit the cache.
#[derive(Eq, PartialEq, Hash, Clone, Copy, Debug)]
pub struct CoordKey {
    microlng: i64,
    microlat: i64,
}

impl CoordKey {
    pub fn new(point: LngLat) -> Self {
        Self {
            microlng: (point.lng * 1e5).round() as i64,
            microlat: (point.lat * 1e5).round() as i64,
        }
    }
}

impl fmt::Display for CoordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.microlng, self.microlat)
    }
}

impl FromStr for CoordKey {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() == 2 {
            Ok(CoordKey {
                microlng: parts[0].parse().map_err(|_| "Invalid CoordKey longitude")?,
                microlat: parts[1].parse().map_err(|_| "Invalid CoordKey latitude")?,
            })
        } else {
            Err("Invalid CoordKey format")
        }
    }
}

// --- Serde Helper for Complex Key ---
mod coord_map {
    use super::CoordKey;
    use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};
    use std::{collections::HashMap, str::FromStr};

    pub fn serialize<S: Serializer>(
        map: &HashMap<CoordKey, String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let string_map: HashMap<String, &String> =
            map.iter().map(|(k, v)| (k.to_string(), v)).collect();
        string_map.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<HashMap<CoordKey, String>, D::Error> {
        let string_map = HashMap::<String, String>::deserialize(deserializer)?;
        string_map
            .into_iter()
            .map(|(k, v)| Ok((CoordKey::from_str(&k).map_err(Error::custom)?, v)))
            .collect()
    }
}

/// Persisted cache of reverse-geocoded address labels.
#[derive(Serialize, Deserialize, Default)]
pub struct LabelCache {
    #[serde(with = "coord_map")]
    labels: HashMap<CoordKey, String>,
}

impl LabelCache {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        if path.as_ref().exists() {
            let data = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> IoResult<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)
    }

    pub fn get(&self, point: LngLat) -> Option<String> {
        self.labels.get(&CoordKey::new(point)).cloned()
    }

    pub fn insert(&mut self, point: LngLat, label: &str) {
        self.labels.insert(CoordKey::new(point), label.to_string());
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
