use crate::ContactFields;

/// Search criteria: one optional substring per contact field.
///
/// A contact matches when every present criterion is a case-insensitive
/// substring of the corresponding field value (logical AND). An empty
/// criteria set matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub patronymic: Option<String>,
    pub company: Option<String>,
    pub work: Option<String>,
    pub mobile: Option<String>,
}

impl SearchCriteria {
    /// Build criteria from raw dialog output, treating empty entries as
    /// "no constraint"
    pub fn from_fields(fields: &ContactFields) -> Self {
        fn criterion(value: &str) -> Option<String> {
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }

        Self {
            first_name: criterion(&fields.first_name),
            last_name: criterion(&fields.last_name),
            patronymic: criterion(&fields.patronymic),
            company: criterion(&fields.company),
            work: criterion(&fields.work),
            mobile: criterion(&fields.mobile),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.patronymic.is_none()
            && self.company.is_none()
            && self.work.is_none()
            && self.mobile.is_none()
    }

    /// True when every present criterion matches its field
    pub fn matches(&self, fields: &ContactFields) -> bool {
        fn contains(criterion: &Option<String>, value: &str) -> bool {
            match criterion {
                Some(needle) => value.to_lowercase().contains(&needle.to_lowercase()),
                None => true,
            }
        }

        contains(&self.first_name, &fields.first_name)
            && contains(&self.last_name, &fields.last_name)
            && contains(&self.patronymic, &fields.patronymic)
            && contains(&self.company, &fields.company)
            && contains(&self.work, &fields.work)
            && contains(&self.mobile, &fields.mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContactFields {
        ContactFields {
            first_name: "Marina".to_string(),
            last_name: "Ivanova".to_string(),
            company: "Albatross Ltd".to_string(),
            mobile: "89112010202".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let criteria = SearchCriteria::default();
        assert!(criteria.is_empty());
        assert!(criteria.matches(&sample()));
        assert!(criteria.matches(&ContactFields::default()));
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let criteria = SearchCriteria {
            company: Some("ALBA".to_string()),
            ..Default::default()
        };
        assert!(criteria.matches(&sample()));

        let criteria = SearchCriteria {
            company: Some("tross lt".to_string()),
            ..Default::default()
        };
        assert!(criteria.matches(&sample()));
    }

    #[test]
    fn test_all_criteria_must_match() {
        // Company matches but last name does not: the contact is excluded
        let criteria = SearchCriteria {
            company: Some("Albatross".to_string()),
            last_name: Some("Petrova".to_string()),
            ..Default::default()
        };
        assert!(!criteria.matches(&sample()));

        let criteria = SearchCriteria {
            company: Some("Albatross".to_string()),
            last_name: Some("ivanova".to_string()),
            ..Default::default()
        };
        assert!(criteria.matches(&sample()));
    }

    #[test]
    fn test_from_fields_drops_empty_entries() {
        let mut raw = ContactFields::default();
        raw.company = "ab".to_string();
        let criteria = SearchCriteria::from_fields(&raw);

        assert_eq!(criteria.company.as_deref(), Some("ab"));
        assert!(criteria.first_name.is_none());
        assert!(!criteria.is_empty());
    }
}
