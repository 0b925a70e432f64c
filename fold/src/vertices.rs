use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;

/// A vertex position. FOLD allows 2D coordinates; those deserialize with
/// `z = 0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Vertex(pub [f32; 3]);

impl<'de> serde::Deserialize<'de> for Vertex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct CoordVisitor;

        impl<'de> Visitor<'de> for CoordVisitor {
            type Value = Vertex;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a sequence of 2 or 3 coordinates")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let x: f32 = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
                let y: f32 = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(1, &self))?;
                let z: f32 = seq.next_element()?.unwrap_or(0.0);

                if seq.next_element::<f32>()?.is_some() {
                    return Err(serde::de::Error::invalid_length(4, &self));
                }

                Ok(Vertex([x, y, z]))
            }
        }

        deserializer.deserialize_seq(CoordVisitor)
    }
}

impl serde::Serialize for Vertex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(3))?;
        for component in &self.0 {
            seq.serialize_element(component)?;
        }
        seq.end()
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct VertexInformation {
    /// For each vertex, its [x, y, z] (or [x, y]) coordinates.
    #[serde(rename = "vertices_coords")]
    pub coords: Option<Vec<Vertex>>,
}

impl VertexInformation {
    pub fn count(&self) -> usize {
        self.coords.as_ref().map(|c| c.len()).unwrap_or(0)
    }
}
