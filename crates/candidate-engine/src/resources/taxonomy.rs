use std::collections::HashMap;

/// Immutable synonym table for skill matching.
///
/// Skills in the same group are treated as interchangeable with high (but not
/// exact-match) confidence. The built-in table covers the logistics stack
/// this engine screens for plus the generic IT skills that show up on most
/// CVs; loaded once and shared read-only across evaluations.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    group_by_skill: HashMap<String, usize>,
    group_count: usize,
}

impl SkillTaxonomy {
    pub fn from_groups<I, G, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut group_by_skill = HashMap::new();
        let mut group_count = 0;

        for group in groups {
            let mut seen_any = false;
            for skill in group {
                let normalized = normalize_skill(skill.as_ref());
                if normalized.is_empty() {
                    continue;
                }
                group_by_skill.entry(normalized).or_insert(group_count);
                seen_any = true;
            }
            if seen_any {
                group_count += 1;
            }
        }

        Self {
            group_by_skill,
            group_count,
        }
    }

    pub fn builtin() -> Self {
        Self::from_groups([
            vec!["supply chain management", "scm", "supply chain"],
            vec!["logistics planning", "logistics management"],
            vec!["warehouse management system", "wms"],
            vec!["transportation management system", "tms"],
            vec!["freight forwarding", "freight forwarder", "forwarding"],
            vec![
                "third party logistics",
                "third-party logistics",
                "3pl",
            ],
            vec!["customs clearance", "customs brokerage"],
            vec!["inventory management", "inventory control", "stock control"],
            vec!["procurement", "purchasing", "sourcing"],
            vec!["demand planning", "demand forecasting"],
            vec!["last mile delivery", "last-mile delivery", "final mile"],
            vec!["fleet management", "fleet operations"],
            vec!["sap", "sap erp", "sap mm"],
            vec!["erp", "enterprise resource planning"],
            vec!["power bi", "powerbi"],
            vec!["ms excel", "excel", "microsoft excel", "advanced excel"],
            vec!["sql", "structured query language"],
            vec!["javascript", "js", "ecmascript"],
            vec!["typescript", "ts"],
            vec!["python", "py"],
            vec![
                "six sigma",
                "lean six sigma",
                "six sigma green belt",
                "six sigma black belt",
            ],
            vec!["business development", "bd"],
            vec!["key account management", "account management"],
        ])
    }

    /// Whether two (raw) skill names belong to the same synonym group.
    /// Exact equality is the caller's concern; this only answers group
    /// membership, so equal strings outside the table return false.
    pub fn are_synonyms(&self, left: &str, right: &str) -> bool {
        let left_group = self.group_by_skill.get(&normalize_skill(left));
        let right_group = self.group_by_skill.get(&normalize_skill(right));

        match (left_group, right_group) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    pub fn is_empty(&self) -> bool {
        self.group_by_skill.is_empty()
    }
}

pub(crate) fn normalize_skill(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_groups_resolve_synonyms() {
        let taxonomy = SkillTaxonomy::builtin();
        assert!(taxonomy.are_synonyms("WMS", "Warehouse Management System"));
        assert!(taxonomy.are_synonyms("JS", "JavaScript"));
        assert!(taxonomy.are_synonyms("Six Sigma Green Belt", "Six Sigma"));
    }

    #[test]
    fn unrelated_skills_are_not_synonyms() {
        let taxonomy = SkillTaxonomy::builtin();
        assert!(!taxonomy.are_synonyms("Python", "SQL"));
        assert!(!taxonomy.are_synonyms("Underwater Basket Weaving", "Logistics Planning"));
    }

    #[test]
    fn custom_groups_are_case_insensitive() {
        let taxonomy = SkillTaxonomy::from_groups([vec!["Air Freight", "airfreight ops"]]);
        assert!(taxonomy.are_synonyms("AIR FREIGHT", "Airfreight Ops"));
        assert_eq!(taxonomy.group_count(), 1);
    }
}
