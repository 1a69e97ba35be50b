//! Canonical agent output covering Twitter, LinkedIn and Pitch Deck.
//!
//! Used by the parser tests and by the verifier's `parser_sample` check, which
//! posts it to a live deployment and expects exactly those three platforms back.

pub const MULTI_PLATFORM_SAMPLE: &str = r#"
### 🐦 Twitter

Here's a great tweet about our product launch!

**Content:** Excited to announce our new AI-powered productivity tool! 🚀 
Transform your workflow in minutes. #AI #Productivity #Innovation

**Hashtags:** #AI #Productivity #Innovation #Tech

---

### 💼 LinkedIn

**Professional Post:**

We're thrilled to announce the launch of our revolutionary AI productivity platform.

After 18 months of development, we've created a solution that adapts to your workflow.

Key benefits:
- 40% time savings
- Seamless integration
- Intuitive interface

**Hashtags:** #AI #Productivity #Business #Innovation

---

### 📊 Pitch Deck

**Slide 1: Problem**

Modern teams waste 8 hours per week on repetitive tasks.

**Slide 2: Solution**

Our AI platform automates workflows while maintaining human oversight.

**Slide 3: Market**

$50B productivity software market growing at 15% annually.
"#;
