/// Display data for one of the mock support agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub avatar: &'static str,
    pub fallback: &'static str,
    pub greeting: &'static str,
}

pub const FALLBACK_NAME: &str = "Gecko AI";
pub const FALLBACK_INITIALS: &str = "AI";

const ACADEMIC_ADVISOR: Agent = Agent {
    name: "Sarah Anderson",
    role: "Academic Advisor",
    description: "Specializes in course selection and academic planning",
    avatar: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=150&h=150&fit=crop&crop=face",
    fallback: "SA",
    greeting: "Hi Liam! I'm Sarah, your academic advisor. How can I help you with your studies today?",
};

const ADMISSIONS_SPECIALIST: Agent = Agent {
    name: "Michael Johnson",
    role: "Admissions Specialist",
    description: "Expert in application requirements and enrollment",
    avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face",
    fallback: "MJ",
    greeting: "Hello Liam! I'm Michael, your admissions specialist. How can I assist you with your application process?",
};

const FINANCIAL_AID_COUNSELOR: Agent = Agent {
    name: "Emma Wilson",
    role: "Financial Aid Counselor",
    description: "Specializes in scholarships, grants, and financial planning",
    avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face",
    fallback: "EW",
    greeting: "Hi Liam! I'm Emma, your financial aid counselor. How can I help you with scholarships and funding options?",
};

const CAMPUS_LIFE_COORDINATOR: Agent = Agent {
    name: "David Chen",
    role: "Campus Life Coordinator",
    description: "Expert in housing, activities, and student services",
    avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
    fallback: "DC",
    greeting: "Hello Liam! I'm David, your campus life coordinator. How can I help you with housing, activities, and student life?",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    AcademicAdvisor,
    AdmissionsSpecialist,
    FinancialAidCounselor,
    CampusLifeCoordinator,
}

impl AgentKind {
    /// Catalog in the order the selection screen lists it.
    pub const ALL: [AgentKind; 4] = [
        AgentKind::AcademicAdvisor,
        AgentKind::AdmissionsSpecialist,
        AgentKind::FinancialAidCounselor,
        AgentKind::CampusLifeCoordinator,
    ];

    pub fn profile(self) -> &'static Agent {
        match self {
            AgentKind::AcademicAdvisor => &ACADEMIC_ADVISOR,
            AgentKind::AdmissionsSpecialist => &ADMISSIONS_SPECIALIST,
            AgentKind::FinancialAidCounselor => &FINANCIAL_AID_COUNSELOR,
            AgentKind::CampusLifeCoordinator => &CAMPUS_LIFE_COORDINATOR,
        }
    }

    pub fn at(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_fixed() {
        let roles: Vec<_> = AgentKind::ALL.iter().map(|k| k.profile().role).collect();
        assert_eq!(
            roles,
            vec![
                "Academic Advisor",
                "Admissions Specialist",
                "Financial Aid Counselor",
                "Campus Life Coordinator"
            ]
        );
        assert_eq!(AgentKind::at(3), Some(AgentKind::CampusLifeCoordinator));
        assert_eq!(AgentKind::at(4), None);
    }

    #[test]
    fn test_initials_match_names() {
        for kind in AgentKind::ALL {
            let agent = kind.profile();
            let initials: String = agent
                .name
                .split_whitespace()
                .filter_map(|part| part.chars().next())
                .collect();
            assert_eq!(initials, agent.fallback);
            assert!(agent.greeting.contains(agent.name.split(' ').next().unwrap()));
        }
    }
}
