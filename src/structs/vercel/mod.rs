pub mod vercel_project;
pub mod vercel_deployment;
