//! The built-in default taxonomy.
//!
//! This is the dataset the sidebar starts with before (or instead of) the
//! record fetched from the server.

use crate::dataset::{Category, FilterDataset};

/// Category names of the built-in taxonomy, in display order.
pub const DEFAULT_CATEGORIES: [&str; 9] = [
    "external_links",
    "social_links",
    "programming_languages",
    "frameworks",
    "databases",
    "tools",
    "cloud_platforms",
    "devops_tools",
    "frontend_technologies",
];

const EXTERNAL_LINKS: &[&str] = &[
    "github.com",
    "linkedin.com",
    "hackerrank.com",
    "leetcode.com",
    "codechef.com",
    "codingninjas.com",
];

const SOCIAL_LINKS: &[&str] = &["instagram.com", "twitter.com", "facebook.com"];

const PROGRAMMING_LANGUAGES: &[&str] = &[
    "python",
    "java",
    "javascript",
    "js",
    "c#",
    "c-sharp",
    "c++",
    "cpp",
    "ruby",
    "go",
    "golang",
    "swift",
    "kotlin",
    "php",
    "typescript",
    "ts",
    "scala",
    "rust",
    "perl",
    "clojure",
    "bash",
    "shell",
    "objective-c",
    "dart",
    "r",
    "matlab",
    "elixir",
    "haskell",
    "lua",
    "erlang",
    "f#",
    "fortran",
    "cobol",
    "sas",
];

const FRAMEWORKS: &[&str] = &[
    "django",
    "flask",
    "react",
    "react.js",
    "angular",
    "angular.js",
    "vue.js",
    "vue",
    "spring",
    "spring boot",
    "asp.net",
    "ruby on rails",
    "express.js",
    "express",
    "node.js",
    "node",
    "laravel",
    "symfony",
    "ember.js",
    "backbone.js",
    "next.js",
    "nuxt.js",
    "svelte",
    "pyramid",
    "fastapi",
    "bottle",
    "phoenix",
    "meteor",
    "gatsby",
    "blazor",
    "uikit",
];

const DATABASES: &[&str] = &[
    "mysql",
    "postgresql",
    "postgres",
    "mongodb",
    "oracle",
    "sql server",
    "sqlserver",
    "ms sql",
    "ms-sql",
    "sqlite",
    "redis",
    "cassandra",
    "mariadb",
    "elasticsearch",
    "db2",
    "couchdb",
    "dynamodb",
    "neo4j",
    "influxdb",
    "hbase",
    "firebase",
    "firestore",
    "cockroachdb",
    "memcached",
    "sql",
];

const TOOLS: &[&str] = &[
    "git",
    "docker",
    "kubernetes",
    "jenkins",
    "aws",
    "azure",
    "gcp",
    "google cloud platform",
    "tensorflow",
    "pytorch",
    "postman",
    "visual studio code",
    "vs code",
    "intellij idea",
    "intellij",
    "eclipse",
    "jira",
    "slack",
    "bitbucket",
    "circleci",
    "travisci",
    "heroku",
    "rancher",
    "openshift",
    "gitlab",
    "kibana",
    "airflow",
    "hadoop",
    "jupyter",
    "databricks",
    "zepl",
];

const CLOUD_PLATFORMS: &[&str] = &[
    "aws",
    "azure",
    "google cloud platform",
    "gcp",
    "ibm cloud",
    "oracle cloud",
    "alibaba cloud",
    "digitalocean",
    "linode",
    "rackspace",
    "cloudflare",
];

const DEVOPS_TOOLS: &[&str] = &[
    "jenkins",
    "ansible",
    "terraform",
    "terraform cloud",
    "puppet",
    "chef",
    "nagios",
    "prometheus",
    "prom",
    "grafana",
    "splunk",
    "docker swarm",
    "saltstack",
    "new relic",
    "elk stack",
    "zabbix",
];

const FRONTEND_TECHNOLOGIES: &[&str] = &[
    "html",
    "css",
    "bootstrap",
    "tailwind css",
    "materialize",
    "bulma",
    "foundation",
    "semantic ui",
    "sass",
    "less",
    "stylus",
];

/// The built-in default dataset.
pub fn default_dataset() -> FilterDataset {
    let labels: [&[&str]; 9] = [
        EXTERNAL_LINKS,
        SOCIAL_LINKS,
        PROGRAMMING_LANGUAGES,
        FRAMEWORKS,
        DATABASES,
        TOOLS,
        CLOUD_PLATFORMS,
        DEVOPS_TOOLS,
        FRONTEND_TECHNOLOGIES,
    ];

    FilterDataset::from_unique(
        DEFAULT_CATEGORIES
            .iter()
            .zip(labels)
            .map(|(name, labels)| Category::new(*name, labels.iter().copied()))
            .collect(),
    )
}
