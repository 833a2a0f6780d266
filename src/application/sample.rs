/// Sample documents wired to CTRL+L so the app can be tried without hunting
/// for a real resume and posting first.

pub fn resume() -> &'static str {
    return r#"
SENIOR FULL-STACK ENGINEER | Python | FastAPI | AWS | Docker

PROFESSIONAL SUMMARY
Accomplished Senior Software Engineer with 8+ years of progressive experience designing, developing, and deploying enterprise-scale applications. Proven expertise in backend systems, cloud architecture, and DevOps practices. Strong track record of leading cross-functional teams, mentoring junior engineers, and delivering high-impact projects.

CORE COMPETENCIES
Backend Development: Python, FastAPI, Django, REST APIs, GraphQL, microservices architecture
Cloud & Infrastructure: AWS (EC2, S3, Lambda, RDS), GCP (Compute Engine, Cloud SQL)
Containerization & Orchestration: Docker, Docker Compose, Kubernetes (EKS, GKE), Helm charts
Databases: PostgreSQL, MongoDB, Redis, Elasticsearch, DynamoDB, database optimization
DevOps & CI/CD: Jenkins, GitHub Actions, GitLab CI/CD, Terraform, CloudFormation

PROFESSIONAL EXPERIENCE

Senior Backend Engineer - Tech Innovations Corp (2021 - Present)
- Led architecture and implementation of microservices platform serving 2M+ daily users
- Designed and built high-performance REST APIs handling 100K+ requests/minute
- Implemented automated testing pipeline increasing code coverage from 45% to 92%
- Mentored team of 4 junior engineers, conducting code reviews and technical training
- Reduced infrastructure costs by 35% through AWS optimization and resource consolidation

Backend Developer - CloudScale Solutions (2018 - 2021)
- Developed scalable Flask and FastAPI applications for SaaS platform
- Implemented Docker containerization reducing deployment time by 60%
- Built CI/CD pipelines using GitHub Actions processing 50+ deployments daily
- Optimized database queries reducing API response time by 40%
- Collaborated with DevOps team to migrate legacy systems to Kubernetes

EDUCATION
Bachelor of Science in Computer Science, State University (2015)

CERTIFICATIONS
- AWS Certified Solutions Architect (2022)
- Docker Certified Associate (2021)
"#
    .trim();
}

pub fn job_description() -> &'static str {
    return r#"
SENIOR BACKEND ENGINEER - PYTHON

COMPANY OVERVIEW
Join a fast-growing fintech startup revolutionizing how businesses manage their operations. We serve 10,000+ companies and process billions in transactions annually. Our engineering team is dedicated to building reliable, scalable systems that millions depend on.

POSITION OVERVIEW
We are seeking an experienced Senior Backend Engineer to lead the development of our core payment processing platform. You will architect scalable microservices, optimize database performance, and mentor junior engineers while working with cutting-edge technologies.

REQUIRED QUALIFICATIONS
- 7+ years of professional software development experience
- 5+ years working with Python in production environments
- Proven expertise with FastAPI or Django frameworks
- Strong understanding of microservices architecture and design patterns
- Production experience with AWS (EC2, S3, RDS, Lambda, SQS) or GCP
- Proficiency in containerization using Docker and Kubernetes
- Solid knowledge of SQL databases (PostgreSQL, MySQL) and NoSQL (MongoDB, Redis)
- Experience with CI/CD pipelines and DevOps practices (Git, Jenkins, GitHub Actions)

PREFERRED QUALIFICATIONS
- Experience with message queues (RabbitMQ, Kafka, SQS)
- Familiarity with infrastructure-as-code (Terraform, CloudFormation)
- Experience with monitoring and observability tools (DataDog, Prometheus)
- AWS or GCP certifications

RESPONSIBILITIES
- Design and build scalable backend services and APIs handling millions of transactions
- Lead technical initiatives and architectural decisions for platform improvements
- Mentor and code review junior engineers, fostering technical growth
- Implement robust testing strategies and improve code quality
- Optimize database queries and API performance
- Troubleshoot production issues and implement solutions
"#
    .trim();
}
