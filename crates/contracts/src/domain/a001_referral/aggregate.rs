use serde::{Deserialize, Serialize};

// ============================================================================
// Form Data
// ============================================================================

/// Данные формы рекомендации: кто рекомендует и кого.
///
/// Сериализуется ровно в шесть строковых полей (camelCase) — это и есть
/// тело запроса к вебхукам.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralFormData {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub referral_first_name: String,
    pub referral_last_name: String,
    pub referral_phone: String,
}

impl ReferralFormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::PhoneNumber => &self.phone_number,
            FormField::ReferralFirstName => &self.referral_first_name,
            FormField::ReferralLastName => &self.referral_last_name,
            FormField::ReferralPhone => &self.referral_phone,
        }
    }

    /// Обновить одно поле; остальные не трогаются
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::PhoneNumber => &mut self.phone_number,
            FormField::ReferralFirstName => &mut self.referral_first_name,
            FormField::ReferralLastName => &mut self.referral_last_name,
            FormField::ReferralPhone => &mut self.referral_phone,
        };
        *slot = value.into();
    }
}

// ============================================================================
// Field names
// ============================================================================

/// Поля формы. Имя поля совпадает с атрибутом `name` у input и с ключом в JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    PhoneNumber,
    ReferralFirstName,
    ReferralLastName,
    ReferralPhone,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::PhoneNumber,
        FormField::ReferralFirstName,
        FormField::ReferralLastName,
        FormField::ReferralPhone,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::PhoneNumber => "phoneNumber",
            FormField::ReferralFirstName => "referralFirstName",
            FormField::ReferralLastName => "referralLastName",
            FormField::ReferralPhone => "referralPhone",
        }
    }

    /// Тип input: телефоны вводятся через `tel`
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::PhoneNumber | FormField::ReferralPhone => "tel",
            _ => "text",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::FirstName | FormField::ReferralFirstName => "First name",
            FormField::LastName | FormField::ReferralLastName => "Last name",
            FormField::PhoneNumber | FormField::ReferralPhone => "(555) 555-5555",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_updates_single_field() {
        let mut form = ReferralFormData::default();
        form.set(FormField::ReferralPhone, "555-0101");

        assert_eq!(form.referral_phone, "555-0101");
        for field in FormField::ALL {
            if field != FormField::ReferralPhone {
                assert_eq!(form.get(field), "");
            }
        }
        assert_ne!(form, ReferralFormData::default());
    }

    #[test]
    fn test_field_names_match_json_keys() {
        let mut form = ReferralFormData::default();
        for field in FormField::ALL {
            form.set(field, field.name());
        }

        let value = serde_json::to_value(&form).unwrap();
        for field in FormField::ALL {
            assert_eq!(value[field.name()], field.name());
        }
    }

    #[test]
    fn test_json_body_has_exactly_six_fields() {
        let mut form = ReferralFormData::default();
        form.set(FormField::FirstName, "Ada");
        form.set(FormField::LastName, "Lovelace");
        form.set(FormField::PhoneNumber, "111");
        form.set(FormField::ReferralFirstName, "Charles");
        form.set(FormField::ReferralLastName, "Babbage");
        form.set(FormField::ReferralPhone, "222");

        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(
            value,
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "phoneNumber": "111",
                "referralFirstName": "Charles",
                "referralLastName": "Babbage",
                "referralPhone": "222",
            })
        );
    }
}
