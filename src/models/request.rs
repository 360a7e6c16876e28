use serde::de::{self, Deserializer, Error as _, MapAccess, Visitor};
use serde_json::Value;
use std::fmt;

/// The body accepted by the normalization endpoint.
///
/// Both fields default to an empty string when omitted (or `null`) so that a
/// missing URL or operation is reported by the later validation steps rather
/// than as a malformed request. Field names are matched without regard to ASCII
/// case, a repeated field keeps its last value and any other field is rejected.
#[derive(Debug, Default, Serialize)]
pub struct NormalizationRequest {
    pub url: String,
    pub operation: String,
}

impl NormalizationRequest {
    /// Decodes the first JSON value in `body`, ignoring anything which follows it.
    ///
    /// A top level `null` decodes to an empty request.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let Members(members) = serde_json::Deserializer::from_slice(body)
            .into_iter::<Members>()
            .next()
            .unwrap_or_else(|| Err(serde_json::Error::custom("no JSON value in request body")))?;

        let mut request = Self::default();
        for (key, value) in members {
            let field = if key.eq_ignore_ascii_case("url") {
                &mut request.url
            } else if key.eq_ignore_ascii_case("operation") {
                &mut request.operation
            } else {
                return Err(serde_json::Error::unknown_field(&key, &["url", "operation"]));
            };

            if let Some(value) = serde_json::from_value::<Option<String>>(value)? {
                *field = value;
            }
        }

        Ok(request)
    }
}

/// The members of a JSON object in document order, or none at all for `null`.
struct Members(Vec<(String, Value)>);

impl<'de> serde::Deserialize<'de> for Members {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MembersVisitor;

        impl<'de> Visitor<'de> for MembersVisitor {
            type Value = Members;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object or null")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Members, E> {
                Ok(Members(Vec::new()))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Members, A::Error> {
                let mut members = Vec::new();
                while let Some(member) = map.next_entry::<String, Value>()? {
                    members.push(member);
                }
                Ok(Members(members))
            }
        }

        deserializer.deserialize_any(MembersVisitor)
    }
}
