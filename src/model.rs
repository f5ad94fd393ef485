//! Student representations: the transfer record clients send and the stored record.

use serde::{Deserialize, Deserializer, Serialize};

/// Reads `null` the same as an absent field: the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Transfer record. Scalar fields default to empty values when absent or null so
/// that validation reports them per field instead of the body failing to parse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grade: f64,
}

/// Stored record. Every persisted student has an id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i32,
    pub full_name: String,
    pub age: i32,
    pub email: String,
    pub address: Option<String>,
    pub grade: f64,
}

/// Stored shape before the store has assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub full_name: String,
    pub age: i32,
    pub email: String,
    pub address: Option<String>,
    pub grade: f64,
}

impl NewStudent {
    pub fn with_id(self, id: i32) -> Student {
        Student {
            id,
            full_name: self.full_name,
            age: self.age,
            email: self.email,
            address: self.address,
            grade: self.grade,
        }
    }
}

// Any client-supplied id is dropped; the store owns ids.
impl From<StudentDto> for NewStudent {
    fn from(dto: StudentDto) -> Self {
        NewStudent {
            full_name: dto.full_name,
            age: dto.age,
            email: dto.email,
            address: dto.address,
            grade: dto.grade,
        }
    }
}

impl From<Student> for StudentDto {
    fn from(s: Student) -> Self {
        StudentDto {
            id: Some(s.id),
            full_name: s.full_name,
            age: s.age,
            email: s.email,
            address: s.address,
            grade: s.grade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_reads_camel_case_and_defaults_missing_fields() {
        let dto: StudentDto = serde_json::from_str(r#"{"fullName":"Ana","grade":8.5}"#).unwrap();
        assert_eq!(dto.full_name, "Ana");
        assert_eq!(dto.age, 0);
        assert_eq!(dto.email, "");
        assert_eq!(dto.address, None);
        assert_eq!(dto.id, None);
    }

    #[test]
    fn dto_reads_null_scalars_as_defaults() {
        let dto: StudentDto =
            serde_json::from_str(r#"{"fullName":null,"age":null,"email":null,"address":null,"grade":null}"#)
                .unwrap();
        assert_eq!(dto, StudentDto::default());
    }

    #[test]
    fn mapping_to_new_student_drops_client_id() {
        let dto = StudentDto {
            id: Some(42),
            full_name: "Ana".into(),
            age: 20,
            email: "ana@test.com".into(),
            address: None,
            grade: 9.0,
        };
        let stored = NewStudent::from(dto).with_id(7);
        assert_eq!(stored.id, 7);
        assert_eq!(stored.full_name, "Ana");
        assert_eq!(StudentDto::from(stored).id, Some(7));
    }

    #[test]
    fn student_serializes_full_name_in_camel_case() {
        let s = NewStudent {
            full_name: "Ana".into(),
            age: 20,
            email: "ana@test.com".into(),
            address: Some("Street 1".into()),
            grade: 9.0,
        }
        .with_id(1);
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["fullName"], "Ana");
        assert_eq!(v["id"], 1);
        assert!(v.get("full_name").is_none());
    }
}
