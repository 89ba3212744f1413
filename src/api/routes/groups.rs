use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use actix_web::web;

/// The business domains whose handlers live outside this crate's shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ApiDomain {
    TeacherAuth,
    Admin,
    StudentAuth,
    ActivityTypes,
    Activities,
    Courses,
    Surveys,
    Sessions,
    Public,
}

impl ApiDomain {
    pub const ALL: [ApiDomain; 9] = [
        ApiDomain::TeacherAuth,
        ApiDomain::Admin,
        ApiDomain::StudentAuth,
        ApiDomain::ActivityTypes,
        ApiDomain::Activities,
        ApiDomain::Courses,
        ApiDomain::Surveys,
        ApiDomain::Sessions,
        ApiDomain::Public,
    ];

    pub const fn prefix(self) -> &'static str {
        match self {
            ApiDomain::TeacherAuth => "/api/teachers",
            ApiDomain::Admin => "/api/admin",
            ApiDomain::StudentAuth => "/api/students",
            ApiDomain::ActivityTypes => "/api/activity-types",
            ApiDomain::Activities => "/api/activities",
            ApiDomain::Courses => "/api/courses",
            ApiDomain::Surveys => "/api/surveys",
            ApiDomain::Sessions => "/api/sessions",
            ApiDomain::Public => "/api/public",
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            ApiDomain::TeacherAuth => "Teacher Authentication",
            ApiDomain::Admin => "Admin Tools",
            ApiDomain::StudentAuth => "Student Authentication",
            ApiDomain::ActivityTypes => "Activity Types",
            ApiDomain::Activities => "Activities",
            ApiDomain::Courses => "Courses",
            ApiDomain::Surveys => "Surveys",
            ApiDomain::Sessions => "Sessions",
            ApiDomain::Public => "Public",
        }
    }
}

pub type RouteGroupFn = Arc<dyn Fn(&mut web::ServiceConfig) + Send + Sync>;

/// Externally supplied route definitions, keyed by domain. The shell only
/// binds each domain to its prefix; what lives under the prefix is up to the
/// registered group.
#[derive(Clone, Default)]
pub struct RouteGroups {
    groups: HashMap<ApiDomain, RouteGroupFn>,
}

impl RouteGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(mut self, domain: ApiDomain, configure: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.groups.insert(domain, Arc::new(configure));
        self
    }

    pub fn is_registered(&self, domain: ApiDomain) -> bool {
        self.groups.contains_key(&domain)
    }

    /// Mounts every domain under its prefix, registered or not, so unknown
    /// paths below a prefix fall through to the application's 404 handler.
    pub fn mount(&self, cfg: &mut web::ServiceConfig) {
        for domain in ApiDomain::ALL {
            let scope = web::scope(domain.prefix());
            let scope = match self.groups.get(&domain) {
                Some(group) => {
                    let group = Arc::clone(group);
                    scope.configure(move |scope_cfg| group(scope_cfg))
                }
                None => scope,
            };
            cfg.service(scope);
        }
    }
}

impl fmt::Debug for RouteGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered: Vec<ApiDomain> = ApiDomain::ALL
            .into_iter()
            .filter(|domain| self.is_registered(*domain))
            .collect();
        f.debug_struct("RouteGroups")
            .field("registered", &registered)
            .finish()
    }
}
