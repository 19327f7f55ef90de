// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `robots.txt` policy.

use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsRule {
	pub user_agent: String,
	pub allow: Vec<String>,
	pub disallow: Vec<String>,
}

impl RobotsRule {
	pub fn new(user_agent: impl Into<String>) -> Self {
		Self {
			user_agent: user_agent.into(),
			allow: Vec::new(),
			disallow: Vec::new(),
		}
	}

	pub fn allow(mut self, path: impl Into<String>) -> Self {
		self.allow.push(path.into());
		self
	}

	pub fn disallow(mut self, path: impl Into<String>) -> Self {
		self.disallow.push(path.into());
		self
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsPolicy {
	pub rules: Vec<RobotsRule>,
	pub sitemap: String,
}

impl RobotsPolicy {
	/// Everything is crawlable except the API and admin console; Googlebot is
	/// unrestricted.
	pub fn for_site(base_url: &str) -> Self {
		let base_url = base_url.trim_end_matches('/');
		Self {
			rules: vec![
				RobotsRule::new("*")
					.allow("/")
					.disallow("/api/")
					.disallow("/admin/"),
				RobotsRule::new("Googlebot").allow("/"),
			],
			sitemap: format!("{base_url}/sitemap.xml"),
		}
	}

	pub fn render(&self) -> String {
		let mut out = String::new();
		for rule in &self.rules {
			let _ = writeln!(out, "User-agent: {}", rule.user_agent);
			for path in &rule.allow {
				let _ = writeln!(out, "Allow: {path}");
			}
			for path in &rule.disallow {
				let _ = writeln!(out, "Disallow: {path}");
			}
			out.push('\n');
		}
		let _ = writeln!(out, "Sitemap: {}", self.sitemap);
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_site_policy_rendering() {
		let robots = RobotsPolicy::for_site("https://amaltech.com.ng/").render();
		assert_eq!(
			robots,
			"User-agent: *\n\
			 Allow: /\n\
			 Disallow: /api/\n\
			 Disallow: /admin/\n\
			 \n\
			 User-agent: Googlebot\n\
			 Allow: /\n\
			 \n\
			 Sitemap: https://amaltech.com.ng/sitemap.xml\n"
		);
	}

	#[test]
	fn test_sitemap_follows_base_url() {
		let policy = RobotsPolicy::for_site("http://localhost:3000");
		assert_eq!(policy.sitemap, "http://localhost:3000/sitemap.xml");
	}

	#[test]
	fn test_generic_agent_blocks_api_and_admin() {
		let policy = RobotsPolicy::for_site("https://amaltech.com.ng");
		let generic = &policy.rules[0];
		assert_eq!(generic.user_agent, "*");
		assert_eq!(generic.disallow, vec!["/api/", "/admin/"]);
		assert!(policy.rules[1].disallow.is_empty());
	}
}
