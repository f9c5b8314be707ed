//! Canned content the mock generator draws from.

use crate::domain::AnswerLetter::{self, A, B, C};
use crate::domain::QuizQuestion;

/// Transcripts known by video id
const CANNED_TRANSCRIPTS: &[(&str, &str)] = &[(
    "jNQXAC9IVRw",
    "Welcome to this video on machine learning. Today we'll explore the fundamentals of machine learning, including supervised learning, unsupervised learning, and reinforcement learning.

Machine learning is a subset of artificial intelligence that enables systems to learn and improve from experience without being explicitly programmed. There are three main types: supervised learning where we have labeled data, unsupervised learning where we explore unlabeled data, and reinforcement learning where agents learn through interaction.

Key concepts include features, labels, models, and training. Features are input variables, labels are output variables, models are mathematical representations, and training is the process of adjusting model parameters.

Common algorithms include linear regression for continuous outputs, logistic regression for classification, decision trees for interpretable models, and neural networks for complex patterns.

Data preprocessing is crucial. We need to handle missing values, normalize features, and split data into training and testing sets. The training set helps the model learn patterns, while the testing set evaluates performance.

Evaluation metrics depend on the problem. For regression, we use mean squared error and R-squared. For classification, we use accuracy, precision, recall, and F1-score.

In practice, always remember: garbage in, garbage out. Quality data leads to quality models. Overfitting occurs when models memorize training data instead of learning patterns. Use regularization and cross-validation to prevent this.

Thank you for watching!",
)];

/// Transcript used for any id not in the canned table
pub const DEFAULT_TRANSCRIPT: &str = "This video discusses an important topic in computer science. The content covers fundamental concepts, practical applications, and best practices. Key takeaways include understanding core principles, implementing solutions effectively, and continuous learning. The speaker emphasizes the importance of practice and real-world application. Throughout the video, various examples and use cases are presented to illustrate the concepts. The importance of staying updated with latest technologies is highlighted. Viewers are encouraged to experiment and build projects. Regular practice and learning from mistakes are crucial for mastery. The video concludes with resources for further learning and community engagement.";

pub const SUMMARIES: [&str; 3] = [
    "Machine learning is a subset of AI that enables systems to learn from data. There are three main types: supervised learning with labeled data, unsupervised learning for pattern discovery, and reinforcement learning through agent interaction. Proper data preprocessing and evaluation metrics are essential for building effective models.",
    "This video covers fundamental concepts and practical applications in the field. Key takeaways include understanding core principles, implementing effective solutions, and continuous learning through practice and experimentation. Staying updated with latest technologies and learning from mistakes are crucial for mastery.",
    "The content provides an overview of essential topics and best practices. Important principles are discussed with real-world examples and applications. The key message emphasizes the importance of understanding fundamentals, consistent practice, and community engagement for professional growth.",
];

pub const KEY_POINTS: [&[&str]; 3] = [
    &[
        "Machine learning is a subset of AI that learns from data without explicit programming",
        "Three main types: supervised learning, unsupervised learning, and reinforcement learning",
        "Features are inputs, labels are outputs, models are mathematical representations",
        "Key algorithms: linear regression, logistic regression, decision trees, neural networks",
        "Data preprocessing includes handling missing values and feature normalization",
        "Evaluation metrics vary by problem: accuracy for classification, MSE for regression",
        "Prevent overfitting through regularization and cross-validation techniques",
    ],
    &[
        "Understanding fundamental concepts is the foundation for practical implementation",
        "Real-world applications require effective problem-solving and critical thinking",
        "Continuous learning and staying updated with new technologies is essential",
        "Practice through building projects helps solidify theoretical knowledge",
        "Community engagement provides support and diverse perspectives",
        "Mistakes and failures are valuable learning opportunities",
        "Balancing theory and practice leads to professional expertise",
    ],
    &[
        "Core principles provide the foundation for all advanced techniques",
        "Implementation requires careful planning and attention to detail",
        "Testing and validation ensure solution quality and reliability",
        "Documentation helps future maintenance and knowledge sharing",
        "Performance optimization improves efficiency and user experience",
        "Security considerations protect data and maintain system integrity",
        "Continuous improvement through feedback drives innovation",
    ],
];

/// Static form of a quiz question
pub struct CannedQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct: AnswerLetter,
}

impl CannedQuestion {
    pub fn to_question(&self) -> QuizQuestion {
        QuizQuestion::new(self.question, self.options, self.correct)
    }
}

const fn q(question: &'static str, options: [&'static str; 4], correct: AnswerLetter) -> CannedQuestion {
    CannedQuestion {
        question,
        options,
        correct,
    }
}

pub const QUIZZES: [&[CannedQuestion]; 2] = [
    &[
        q(
            "What is machine learning?",
            [
                "A subset of AI that learns from data without explicit programming",
                "A type of programming language",
                "A hardware technology",
                "A social media platform",
            ],
            A,
        ),
        q(
            "How many main types of machine learning are there?",
            ["Two", "Three", "Four", "Five"],
            B,
        ),
        q(
            "What is a feature in machine learning?",
            ["A label value", "An input variable", "A trained model", "A testing set"],
            B,
        ),
        q(
            "Which algorithm is used for continuous outputs?",
            [
                "Logistic regression",
                "Decision trees",
                "Linear regression",
                "K-means clustering",
            ],
            C,
        ),
        q(
            "What does data preprocessing involve?",
            [
                "Only splitting data",
                "Only normalizing features",
                "Handling missing values and normalizing features",
                "Creating new datasets",
            ],
            C,
        ),
        q(
            "What is overfitting?",
            [
                "Using too many features",
                "Models memorizing training data instead of learning patterns",
                "Having insufficient training data",
                "Using complex algorithms",
            ],
            B,
        ),
        q(
            "Which metric is used for classification problems?",
            ["Mean squared error", "R-squared", "Accuracy", "RMSE"],
            C,
        ),
        q(
            "What is cross-validation used for?",
            [
                "Data preprocessing",
                "Model training",
                "Preventing overfitting",
                "Feature selection",
            ],
            C,
        ),
        q(
            "Which type of learning uses labeled data?",
            [
                "Unsupervised learning",
                "Reinforcement learning",
                "Supervised learning",
                "Self-learning",
            ],
            C,
        ),
        q(
            "What is the golden rule of machine learning?",
            [
                "Always use complex models",
                "Garbage in, garbage out",
                "More data is always better",
                "Features are more important than data",
            ],
            B,
        ),
    ],
    &[
        q(
            "What is the first step in most projects?",
            [
                "Implement solutions",
                "Understand requirements",
                "Deploy to production",
                "Test thoroughly",
            ],
            B,
        ),
        q(
            "Why is practice important?",
            [
                "It wastes time",
                "It solidifies theoretical knowledge",
                "It is not necessary",
                "It causes confusion",
            ],
            B,
        ),
        q(
            "How should mistakes be viewed?",
            [
                "As failures to avoid",
                "As valuable learning opportunities",
                "As signs of incompetence",
                "As reasons to quit",
            ],
            B,
        ),
        q(
            "What does staying updated mean?",
            [
                "Ignoring new technologies",
                "Following latest trends continuously",
                "Learning new tools and methodologies",
                "Rejecting old practices",
            ],
            C,
        ),
        q(
            "Why is community engagement valuable?",
            [
                "It wastes time",
                "It provides support and diverse perspectives",
                "It is not necessary",
                "It slows down progress",
            ],
            B,
        ),
        q(
            "What is the balance between theory and practice?",
            [
                "Only theory is needed",
                "Only practice is needed",
                "Both are essential for expertise",
                "Neither is important",
            ],
            C,
        ),
        q(
            "How should feedback be handled?",
            [
                "Ignored completely",
                "Used for continuous improvement",
                "Viewed as criticism only",
                "Dismissed immediately",
            ],
            B,
        ),
        q(
            "What drives professional growth?",
            [
                "Staying comfortable",
                "Avoiding challenges",
                "Continuous learning and practice",
                "Ignoring feedback",
            ],
            C,
        ),
        q(
            "Why is documentation important?",
            [
                "It is unnecessary",
                "It helps future maintenance and knowledge sharing",
                "It slows development",
                "It is only for large projects",
            ],
            B,
        ),
        q(
            "What is the key to mastery?",
            [
                "Quick learning",
                "Avoiding mistakes",
                "Consistent practice and continuous improvement",
                "Natural talent alone",
            ],
            C,
        ),
    ],
];

/// Transcript for a video id, falling back to the generic one
pub fn transcript_for(video_id: &str) -> &'static str {
    CANNED_TRANSCRIPTS
        .iter()
        .find(|(id, _)| *id == video_id)
        .map(|(_, transcript)| *transcript)
        .unwrap_or(DEFAULT_TRANSCRIPT)
}
